use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Html};

use business::domain::product::model::Product;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::value_objects::ProductId;

use crate::api::tags::ApiTags;

pub struct ShareApi {
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    storefront_url: String,
}

impl ShareApi {
    pub fn new(get_by_id_use_case: Arc<dyn GetProductByIdUseCase>, storefront_url: String) -> Self {
        Self {
            get_by_id_use_case,
            storefront_url: storefront_url.trim_end_matches('/').to_string(),
        }
    }

    fn render(&self, product: &Product) -> String {
        let title = escape_html(&product.brand_name);
        let description = escape_html(&share_description(product));
        let product_url = format!("{}/products/{}", self.storefront_url, product.id);
        let image_meta = match &product.image_url {
            Some(image_url) => {
                let image_url = escape_html(image_url);
                format!(
                    r#"<meta property="og:image" content="{image_url}" />
    <meta name="twitter:image" content="{image_url}" />
    <meta name="twitter:card" content="summary_large_image" />"#
                )
            }
            None => r#"<meta name="twitter:card" content="summary" />"#.to_string(),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>{title}</title>
    <meta property="og:type" content="product" />
    <meta property="og:title" content="{title}" />
    <meta property="og:description" content="{description}" />
    <meta property="og:url" content="{product_url}" />
    <meta name="twitter:title" content="{title}" />
    <meta name="twitter:description" content="{description}" />
    {image_meta}
    <meta http-equiv="refresh" content="0;url={product_url}" />
</head>
<body>
    <p>Redirecting to <a href="{product_url}">{title}</a>&hellip;</p>
</body>
</html>
"#
        )
    }
}

fn share_description(product: &Product) -> String {
    let mut parts = vec![product.salt_name.clone(), product.company.clone()];
    if let Some(packing) = &product.packing {
        parts.push(packing.clone());
    }
    if product.mrp > 0.0 {
        parts.push(format!("MRP ₹{:.2}", product.mrp));
    }
    parts.retain(|p| !p.is_empty());
    parts.join(" | ")
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Social preview API
///
/// Serves crawler-friendly HTML with Open Graph / Twitter Card meta tags
/// for product links shared in chats, then bounces humans to the real
/// product page.
#[OpenApi]
impl ShareApi {
    /// Product share page
    #[oai(path = "/share/products/:id", method = "get", tag = "ApiTags::Share")]
    async fn share_product(&self, id: Path<String>) -> SharePageResponse {
        let product_id = match ProductId::new(id.0) {
            Ok(product_id) => product_id,
            Err(_) => return SharePageResponse::NotFound(Html(not_found_page())),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: product_id })
            .await
        {
            Ok(product) => SharePageResponse::Ok(Html(self.render(&product))),
            Err(_) => SharePageResponse::NotFound(Html(not_found_page())),
        }
    }
}

fn not_found_page() -> String {
    "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\" /><title>Product not found</title></head><body><p>Product not found.</p></body></html>\n".to_string()
}

#[derive(poem_openapi::ApiResponse)]
pub enum SharePageResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 404)]
    NotFound(Html<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(packing: Option<&str>, image_url: Option<&str>) -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::from_repository("amoxil-capsules"),
            "Amoxil \"500\" & Co".to_string(),
            "amoxicillin".to_string(),
            "GSK".to_string(),
            packing.map(|p| p.to_string()),
            120.0,
            "antibiotics".to_string(),
            true,
            true,
            false,
            image_url.map(|u| u.to_string()),
            now,
            now,
        )
    }

    fn api() -> ShareApi {
        struct Never;

        #[async_trait::async_trait]
        impl GetProductByIdUseCase for Never {
            async fn execute(
                &self,
                _params: GetProductByIdParams,
            ) -> Result<Product, business::domain::product::errors::ProductError> {
                unreachable!("render tests never hit the use case")
            }
        }

        ShareApi::new(Arc::new(Never), "https://store.example/".to_string())
    }

    #[test]
    fn should_escape_product_fields_in_meta_tags() {
        let html = api().render(&product(None, None));

        assert!(html.contains("Amoxil &quot;500&quot; &amp; Co"));
        assert!(!html.contains("Amoxil \"500\""));
    }

    #[test]
    fn should_point_open_graph_url_at_the_storefront() {
        let html = api().render(&product(None, None));

        assert!(html.contains(
            r#"<meta property="og:url" content="https://store.example/products/amoxil-capsules" />"#
        ));
    }

    #[test]
    fn should_use_large_card_when_image_present() {
        let html = api().render(&product(
            Some("10x10 capsules"),
            Some("https://img.example/amoxil.jpg"),
        ));

        assert!(html.contains("summary_large_image"));
        assert!(html.contains("https://img.example/amoxil.jpg"));
        assert!(html.contains("10x10 capsules"));
    }

    #[test]
    fn should_describe_price_and_salt() {
        let description = share_description(&product(Some("10x10"), None));

        assert_eq!(description, "amoxicillin | GSK | 10x10 | MRP ₹120.00");
    }
}
