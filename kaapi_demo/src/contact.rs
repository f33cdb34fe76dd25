use std::sync::LazyLock;

use serde_json::{json, Value};

pub static CONTACT: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "name": "Anita Rao",
        "email": "anita.rao@example.com",
        "subject": "Sample request",
        "message": "Could you send 500 g samples of your washed Arabica to our roastery in Hamburg?",
        "consent": true,
    })
});
