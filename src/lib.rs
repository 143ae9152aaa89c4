pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod clock;
        pub mod id_generator;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod input;
        }
        pub mod event_store;
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
    }
}

pub mod shell;
