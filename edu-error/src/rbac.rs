use thiserror::Error;

#[derive(Default, Error, Debug)]
pub enum RBACError {
    #[default]
    #[error("primitive error")]
    Primitive,
    #[error("rule already exists for method '{method}' and path '{path}'")]
    RuleExists { method: String, path: String },
}
