mod app;

mod domain {
    pub mod entities {
        pub mod edit;
        pub mod row;
        pub mod schema;
        pub mod sort;
        pub mod staging;
        pub mod value;
    }
}

mod infra {
    pub mod json;
}

mod ui {
    pub mod state {
        pub mod app_state;
        pub mod table_state;
    }
    pub mod style;
}

mod usecase {
    pub mod ports {
        pub mod ids;
    }
    pub mod services {
        pub mod edit_service;
        pub mod query_service;
        pub mod staging_service;
    }
}


fn main() {
    dioxus::launch(app::App);
}
