use vodca::{AsRefln, Fromln};

#[derive(Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

// Tokens end up in logs through `#[instrument]`, keep them out.
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}
