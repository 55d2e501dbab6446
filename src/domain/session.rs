use pushkind_common::domain::auth::AuthenticatedUser;
use serde::Serialize;

/// Authentication state of the visitor handling a request.
///
/// Built once per request from the identity cookie and handed to services
/// explicitly. The lifecycle only moves forward:
/// `Anonymous -> Authenticated -> SignedOut`.
#[derive(Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(AuthenticatedUser),
    SignedOut,
}

impl Session {
    /// Build the session for a request from the optional identity extracted by actix.
    pub fn from_identity(user: Option<AuthenticatedUser>) -> Self {
        match user {
            Some(user) => Session::Authenticated(user),
            None => Session::Anonymous,
        }
    }

    /// End the session. Signing out an anonymous session is a no-op.
    pub fn sign_out(self) -> Self {
        match self {
            Session::Anonymous => Session::Anonymous,
            Session::Authenticated(_) | Session::SignedOut => Session::SignedOut,
        }
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous | Session::SignedOut => None,
        }
    }

    /// Template-facing summary of the session.
    pub fn view(&self) -> SessionView {
        match self {
            Session::Authenticated(user) => SessionView {
                state: "authenticated",
                name: Some(user.name.clone()),
                email: Some(user.email.clone()),
            },
            Session::Anonymous => SessionView {
                state: "anonymous",
                name: None,
                email: None,
            },
            Session::SignedOut => SessionView {
                state: "signed_out",
                name: None,
                email: None,
            },
        }
    }
}

/// Serializable snapshot of a [`Session`] for templates and JSON responses.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionView {
    pub state: &'static str,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            email: "user@example.com".to_string(),
            hub_id: 1,
            name: "Tester".to_string(),
            roles: Vec::new(),
            exp: 0,
        }
    }

    #[test]
    fn from_identity_maps_presence() {
        let session = Session::from_identity(Some(user()));
        assert_eq!(session.user().map(|u| u.sub.as_str()), Some("user-1"));
        assert_eq!(session.view().state, "authenticated");
        assert!(matches!(Session::from_identity(None), Session::Anonymous));
    }

    #[test]
    fn signing_out_ends_an_authenticated_session() {
        let session = Session::from_identity(Some(user())).sign_out();

        assert!(matches!(session, Session::SignedOut));
        assert!(session.user().is_none());
        assert_eq!(session.view().state, "signed_out");
        assert!(matches!(session.sign_out(), Session::SignedOut));
    }

    #[test]
    fn anonymous_sign_out_stays_anonymous() {
        let view = Session::Anonymous.sign_out().view();
        assert_eq!(view.state, "anonymous");
        assert_eq!(view.name, None);
    }
}
