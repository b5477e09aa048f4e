use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use formrelay::{EnquiryRelayFormRelay, FormRelayClient};
use whatsapp::WhatsAppLinks;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::checkout::CheckoutUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::enquiry::product_link::ProductEnquiryLinkUseCaseImpl;
use business::application::enquiry::submit::SubmitEnquiryUseCaseImpl;
use business::application::product::admin_list::AdminListProductsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_similar::GetSimilarProductsUseCaseImpl;
use business::application::product::list_catalog::ListCatalogUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::update_new_arrivals::UpdateNewArrivalsUseCaseImpl;
use business::application::product::update_visibility::UpdateVisibilityUseCaseImpl;
use business::domain::product::cache::{CatalogCache, DEFAULT_CATALOG_TTL, SystemClock};

use crate::config::formrelay_config::FormRelayConfig;
use crate::config::storefront_config::StorefrontConfig;
use crate::config::whatsapp_config::WhatsAppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub enquiry_api: crate::api::enquiry::routes::EnquiryApi,
    pub admin_api: crate::api::admin::routes::AdminProductApi,
    pub share_api: crate::api::share::routes::ShareApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool));

        let whatsapp_config = WhatsAppConfig::from_env();
        let whatsapp_links = Arc::new(WhatsAppLinks::new(&whatsapp_config.phone));

        let formrelay_config = FormRelayConfig::from_env();
        let enquiry_relay = Arc::new(EnquiryRelayFormRelay::new(FormRelayClient::new(
            formrelay_config.access_key,
            formrelay_config.base_url,
        )));

        let storefront_config = StorefrontConfig::from_env();

        // One catalog cache for the whole process: every read shares it and
        // every admin mutation invalidates it.
        let catalog_cache = Arc::new(CatalogCache::new(
            DEFAULT_CATALOG_TTL,
            Box::new(SystemClock),
        ));

        // Catalog use cases
        let list_use_case = Arc::new(ListCatalogUseCaseImpl {
            repository: product_repository.clone(),
            cache: catalog_cache.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_similar_use_case = Arc::new(GetSimilarProductsUseCaseImpl {
            repository: product_repository.clone(),
            cache: catalog_cache.clone(),
            logger: logger.clone(),
        });
        let enquiry_link_use_case = Arc::new(ProductEnquiryLinkUseCaseImpl {
            repository: product_repository.clone(),
            links: whatsapp_links.clone(),
            logger: logger.clone(),
        });

        // Admin use cases
        let admin_list_use_case = Arc::new(AdminListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            cache: catalog_cache.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            cache: catalog_cache.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductsUseCaseImpl {
            repository: product_repository.clone(),
            cache: catalog_cache.clone(),
            logger: logger.clone(),
        });
        let visibility_use_case = Arc::new(UpdateVisibilityUseCaseImpl {
            repository: product_repository.clone(),
            cache: catalog_cache.clone(),
            logger: logger.clone(),
        });
        let new_arrivals_use_case = Arc::new(UpdateNewArrivalsUseCaseImpl {
            repository: product_repository.clone(),
            cache: catalog_cache,
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            repository: cart_repository,
            handoff: whatsapp_links,
            logger: logger.clone(),
        });

        // Enquiry use cases
        let submit_enquiry_use_case = Arc::new(SubmitEnquiryUseCaseImpl {
            relay: enquiry_relay,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            list_use_case,
            get_by_id_use_case.clone(),
            get_similar_use_case,
            enquiry_link_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_cart_use_case,
            checkout_use_case,
        );

        let enquiry_api = crate::api::enquiry::routes::EnquiryApi::new(submit_enquiry_use_case);

        let admin_api = crate::api::admin::routes::AdminProductApi::new(
            admin_list_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            visibility_use_case,
            new_arrivals_use_case,
        );

        let share_api = crate::api::share::routes::ShareApi::new(
            get_by_id_use_case,
            storefront_config.base_url,
        );

        Ok(Self {
            health_api,
            product_api,
            cart_api,
            enquiry_api,
            admin_api,
            share_api,
        })
    }
}
