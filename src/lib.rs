pub mod shared {
    pub mod core {
        pub mod dispatch;
        pub mod domain;
        pub mod errors;
        pub mod primitives;
    }
    pub mod application {
        pub mod command_handler;
        pub mod errors;
        pub mod replay;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod commands;
            pub mod decide;
            pub mod domain;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
