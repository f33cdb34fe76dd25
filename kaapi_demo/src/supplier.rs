use std::sync::LazyLock;

use serde_json::{json, Value};

pub static ALL_SUPPLIERS: LazyLock<Vec<&Value>> = LazyLock::new(|| {
    vec![
        &*ESTATE_OWNER,
        &*FPO_MEMBER,
        &*CURING_WORKS,
        &*INDIVIDUAL_FARMER,
        &*BROKER_TRADER,
    ]
});

pub static ESTATE_OWNER: LazyLock<Value> = LazyLock::new(|| {
    with_base(json!({
        "userType": "Coffee Estate Owner",
        "estateName": "Hill Crest Estate",
        "estateOwnerName": "Meera Ponnappa",
        "surveyNumber": "112/4B",
        "address": "Hill Crest Estate, Chikmagalur, Karnataka",
        "certifications": ["Rainforest Alliance", "Any Other"],
        "otherCertificationName": "India Organic",
        "isOrganic": "Yes",
    }))
});

pub static FPO_MEMBER: LazyLock<Value> = LazyLock::new(|| {
    with_base(json!({
        "userType": "Member of Farmer-Producer Organisation",
        "fpoName": "Baba Budan Growers Collective",
        "fpoAddress": "Main Road, Aldur, Karnataka",
        "registrationNumber": "FPO-KA-2019-0042",
        "memberName": "Suresh Gowda",
    }))
});

pub static CURING_WORKS: LazyLock<Value> = LazyLock::new(|| {
    with_base(json!({
        "userType": "Coffee Curing Works",
        "promoterName": "Coorg Curing Co.",
        "licenceNumber": "CB/CW/0815",
        "curingWorksAddress": "Industrial Area, Kushalnagar, Karnataka",
        "contactPerson": "Anil Kariappa",
        "isOrganic": "No",
    }))
});

pub static INDIVIDUAL_FARMER: LazyLock<Value> = LazyLock::new(|| {
    with_base(json!({
        "userType": "Individual Farmer",
        "fullName": "Ravi Kumar",
        "aadharCardNumber": "1234 5678 9012",
    }))
});

pub static BROKER_TRADER: LazyLock<Value> = LazyLock::new(|| {
    with_base(json!({
        "userType": "Brokers / Traders",
        "fullName": "Farah Sheikh",
        "registrationNumber": "TR-2021-778",
        "address": "Coffee Board Road, Bengaluru",
        "certifications": ["4C"],
    }))
});

fn with_base(mut payload: Value) -> Value {
    for (field, value) in [
        ("email", "supply@example.com"),
        ("mobileNumber", "+91 98450 12345"),
        ("country", "India"),
        ("productsAvailable", "Washed Arabica, 12 tonnes per season"),
    ] {
        payload[field] = value.into();
    }
    payload
}
