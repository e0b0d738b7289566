pub mod jwt_punchout_token_verifier_impl;
