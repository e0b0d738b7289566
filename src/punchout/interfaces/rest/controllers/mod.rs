pub mod punchout_rest_controller;
