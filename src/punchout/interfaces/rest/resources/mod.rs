pub mod health_resource;
pub mod punchout_login_query_resource;
