pub mod punchout_session_command_service_impl;
