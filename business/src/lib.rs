pub mod application {
    pub mod product {
        pub mod add_rating;
        pub mod get_all;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_rating;
            pub mod get_all;
        }
    }
}
