// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod shared {
    pub mod infrastructure {
        pub mod worksheet;
    }
}

pub mod modules {
    pub mod cost_items {
        pub mod core {
            pub mod codec;
            pub mod locator;
            pub mod record;
            pub mod selection;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_cost_item {
                pub mod build;
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_cost_items {
                pub mod handler;
                pub mod view;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_cost_item {
                pub mod apply;
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_cost_item {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod setup_worksheet {
                pub mod handler;
            }
        }
    }
}

pub mod shell;
