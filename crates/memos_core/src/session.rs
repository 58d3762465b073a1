//! Session collaborator.
//!
//! The service only asks whether a user is present; how the session was
//! established is outside core.

use crate::model::user::User;

/// Answers "who is signed in right now".
pub trait SessionProvider {
    fn current_user(&self) -> Option<User>;
}

impl<T: SessionProvider + ?Sized> SessionProvider for &T {
    fn current_user(&self) -> Option<User> {
        (**self).current_user()
    }
}

/// In-process session holding at most one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSession {
    user: Option<User>,
}

impl LocalSession {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

impl SessionProvider for LocalSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
