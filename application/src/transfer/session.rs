pub struct AuthenticateDto {
    pub token: String,
}

impl std::fmt::Debug for AuthenticateDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticateDto").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AuthenticatedUserDto {
    pub user_id: i32,
}
