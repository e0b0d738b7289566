pub mod deep_link_router;
pub mod punchout_session_command_service;
pub mod session_cookie_issuer;
