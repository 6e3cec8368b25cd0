use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub first_name: String,
    pub last_name: String,
}

impl Director {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A catalog entry as it goes over the wire.
///
/// `director` is owned by the movie and serialized as `null` when absent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

/// Payload accepted when creating a movie.
///
/// Decoding is structural only: unknown keys (a client supplied `id`
/// included) are dropped and missing fields fall back to empty values.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewMovie {
    pub isbn: String,
    pub title: String,
    #[serde(alias = "Director")]
    pub director: Option<Director>,
}

impl NewMovie {
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            isbn: self.isbn,
            title: self.title,
            director: self.director,
        }
    }
}

/// Records every fresh catalog starts with.
pub fn seed() -> Vec<Movie> {
    vec![
        Movie {
            id: "1".to_string(),
            isbn: "123".to_string(),
            title: "Movie one".to_string(),
            director: Some(Director::new("James", "Gunn")),
        },
        Movie {
            id: "2".to_string(),
            isbn: "289137".to_string(),
            title: "Movie Two".to_string(),
            director: Some(Director::new("Nguyen", "Duy")),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_serializes_wire_shape() {
        let movie = seed().remove(0);
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "isbn": "123",
                "title": "Movie one",
                "director": {"firstName": "James", "lastName": "Gunn"}
            })
        );
    }

    #[test]
    fn it_serializes_missing_director_as_null() {
        let movie = Movie {
            id: "x".into(),
            isbn: "".into(),
            title: "".into(),
            director: None,
        };
        let value = serde_json::to_value(&movie).unwrap();
        assert!(value["director"].is_null());
    }

    #[test]
    fn it_round_trips_through_json() {
        for movie in seed() {
            let encoded = serde_json::to_string(&movie).unwrap();
            let decoded: Movie = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, movie);
        }
    }

    #[test]
    fn it_ignores_client_id_on_new_movie() {
        let input: NewMovie = serde_json::from_str(
            r#"{"id":"mine","isbn":"999","title":"New Movie","director":{"firstName":"Ava","lastName":"Lee"}}"#,
        )
        .unwrap();
        let movie = input.into_movie("generated".into());
        assert_eq!(movie.id, "generated");
        assert_eq!(movie.isbn, "999");
        assert_eq!(movie.title, "New Movie");
        assert_eq!(movie.director, Some(Director::new("Ava", "Lee")));
    }

    #[test]
    fn it_defaults_missing_fields() {
        let input: NewMovie = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(input.isbn, "");
        assert_eq!(input.title, "Only title");
        assert_eq!(input.director, None);
    }

    #[test]
    fn it_accepts_capitalised_director_key() {
        let input: NewMovie = serde_json::from_str(
            r#"{"isbn":"1","title":"t","Director":{"firstName":"A","lastName":"B"}}"#,
        )
        .unwrap();
        assert_eq!(input.director, Some(Director::new("A", "B")));
    }

    #[test]
    fn it_rejects_wrong_types() {
        assert!(serde_json::from_str::<NewMovie>(r#"{"isbn": 12}"#).is_err());
        assert!(serde_json::from_str::<NewMovie>(r#"[1, 2]"#).is_err());
        assert!(serde_json::from_str::<NewMovie>("not json").is_err());
    }
}
