pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod checkout;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod enquiry {
        pub mod product_link;
        pub mod submit;
    }
    pub mod product {
        pub mod admin_list;
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_similar;
        pub mod list_catalog;
        pub mod update;
        pub mod update_new_arrivals;
        pub mod update_visibility;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod add_item;
            pub mod checkout;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod enquiry {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod product_link;
            pub mod submit;
        }
    }
    pub mod product {
        pub mod cache;
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod similarity;
        pub mod value_objects;
        pub mod use_cases {
            pub mod admin_list;
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_similar;
            pub mod list_catalog;
            pub mod update;
            pub mod update_new_arrivals;
            pub mod update_visibility;
        }
    }
}
