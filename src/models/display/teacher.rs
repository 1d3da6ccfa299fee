//! Teacher display model

use serde::Serialize;
use tabled::Tabled;

use super::or_dash;
use crate::client::models::Teacher;

/// Teacher display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeacherDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "SUBJECT")]
    pub subject: String,

    #[tabled(rename = "ESTABLISHMENT")]
    pub establishment: String,
}

impl From<Teacher> for TeacherDisplay {
    fn from(t: Teacher) -> Self {
        let name = t.full_name();
        Self {
            id: t.id,
            name: if name.is_empty() { "--".to_string() } else { name },
            email: or_dash(t.email),
            subject: or_dash(t.subject),
            establishment: or_dash(t.establishment_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(first: &str, last: &str) -> Teacher {
        Teacher {
            id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: Some("t@school.org".to_string()),
            subject: None,
            establishment_name: None,
        }
    }

    #[test]
    fn test_name_combines_parts() {
        assert_eq!(TeacherDisplay::from(teacher("Awa", "Ndiaye")).name, "Awa Ndiaye");
        assert_eq!(TeacherDisplay::from(teacher("", "Ndiaye")).name, "Ndiaye");
        assert_eq!(TeacherDisplay::from(teacher("", "")).name, "--");
    }
}
