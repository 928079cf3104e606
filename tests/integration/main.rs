mod common;

mod commands_test;
mod scheme_client_test;
