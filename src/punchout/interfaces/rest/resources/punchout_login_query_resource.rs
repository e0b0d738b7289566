use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PunchoutLoginQueryResource {
    /// Signed punchout token issued by the procurement gateway.
    #[validate(length(max = 8192))]
    pub token: Option<String>,
}
