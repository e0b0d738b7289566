pub mod establish_punchout_session_command;
