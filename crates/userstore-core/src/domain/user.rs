use serde::{Deserialize, Serialize};

/// A user record. The email is the identity key: unique and immutable
/// once the record exists.
///
/// The password holds a salted hash at rest and is accepted on input
/// only; it is never written back out when the record is serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub username: String,
    pub age: u32,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default)]
    pub files: Vec<File>,
}

impl User {
    /// Number of attached file references, as reported in events.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// A file reference attached to a user. Just a name: no content, no
/// uniqueness constraint. Lifecycle is bound to the owning user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            email: "jane@example.com".to_string(),
            username: "jane".to_string(),
            age: 30,
            password: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            files: vec![File {
                name: "notes.txt".to_string(),
            }],
        }
    }

    #[test]
    fn password_is_never_serialized() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["username"], "jane");
        assert_eq!(json["age"], 30);
        assert_eq!(json["files"][0]["name"], "notes.txt");
    }

    #[test]
    fn missing_password_and_files_deserialize_to_defaults() {
        let user: User =
            serde_json::from_str(r#"{"email":"a@b.c","username":"a","age":21}"#).unwrap();
        assert!(user.password.is_empty());
        assert!(user.files.is_empty());
    }

    #[test]
    fn negative_age_is_rejected() {
        let res: Result<User, _> =
            serde_json::from_str(r#"{"email":"a@b.c","username":"a","age":-1}"#);
        assert!(res.is_err());
    }
}
