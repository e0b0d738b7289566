
mod app_config_tests;
mod punchout_router_tests;
