//! Canned dictionary responses.

use serde_json::{json, Value};

/// Two entries for "cook" in the shape the public dictionary API returns.
pub fn cook_response() -> Value {
    json!([
        {
            "word": "cook",
            "phonetic": "/kʊk/",
            "phonetics": [{ "text": "/kʊk/", "audio": "" }],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "A person who prepares food.", "example": "The cook made soup." },
                        { "definition": "The head cook of a ship." },
                        { "definition": "A third sense." }
                    ]
                },
                {
                    "partOfSpeech": "verb",
                    "definitions": [
                        { "definition": "To prepare food by heating it." }
                    ]
                }
            ]
        },
        {
            "word": "cook",
            "phonetics": [{ "audio": "https://audio.example/cook-us.mp3" }],
            "meanings": [
                {
                    "partOfSpeech": "adjective",
                    "definitions": [{ "definition": "Cooked." }]
                }
            ]
        }
    ])
}

/// One entry for "cat" without any audio clip.
pub fn cat_response() -> Value {
    json!([
        {
            "word": "cat",
            "phonetics": [{ "text": "/kæt/" }],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [{ "definition": "A small domesticated feline." }]
                }
            ]
        }
    ])
}
