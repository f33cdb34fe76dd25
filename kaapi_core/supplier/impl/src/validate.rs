use kaapi_models::{
    email_address::EmailAddress,
    form::FormFields,
    issue::{IssueCode, ValidationIssue, ValidationIssues},
    supplier::{
        Certification, Country, MobileNumber, OrganicStatus, ProductsAvailable, SupplierDetail,
        SupplierDetails, SupplierSubmission, SupplierUserType,
    },
};
use serde_json::Value;

const PRODUCTS_AVAILABLE_TOO_SHORT: &str =
    "Please describe the products available in at least 10 characters";

/// Validate an untyped supplier registration.
///
/// The base fields are checked first. If `userType` names a known user type,
/// the fields it requires are checked afterwards; if any of them is not
/// filled in, a single issue is recorded on the first field of the group.
/// Fields required only by other user types are ignored.
pub fn validate_supplier(payload: &Value) -> Result<SupplierSubmission, ValidationIssues> {
    let mut fields = FormFields::new(payload)?;

    let user_type = fields.required_str("userType").and_then(|user_type| {
        fields.check("userType", user_type.parse::<SupplierUserType>(), |_| {
            (IssueCode::InvalidEnumValue, "Please select a valid user type")
        })
    });

    let email = fields.required_str("email").and_then(|email| {
        fields.check("email", email.parse::<EmailAddress>(), |_| {
            (IssueCode::InvalidEmail, "Please enter a valid email address")
        })
    });

    let mobile_number = fields.required_str("mobileNumber").and_then(|mobile_number| {
        fields.check("mobileNumber", MobileNumber::try_from(mobile_number), |_| {
            (IssueCode::TooSmall, "Mobile number must be at least 5 characters")
        })
    });

    let country = fields.required_str("country").and_then(|country| {
        fields.check("country", Country::try_from(country), |_| {
            (IssueCode::TooSmall, "Country is required")
        })
    });

    let products_available = fields.required_str("productsAvailable").and_then(|products| {
        fields.check("productsAvailable", ProductsAvailable::try_from(products), |_| {
            (IssueCode::TooSmall, PRODUCTS_AVAILABLE_TOO_SHORT)
        })
    });

    let certifications = fields
        .optional_array("certifications")
        .map(|items| parse_certifications(&mut fields, items));

    let other_certification_name = fields
        .optional_str("otherCertificationName")
        .map(str::to_owned);

    let is_organic = fields.optional_str("isOrganic").and_then(|is_organic| {
        fields.check("isOrganic", is_organic.parse::<OrganicStatus>(), |_| {
            (IssueCode::InvalidEnumValue, "Please select Yes or No")
        })
    });

    let details = user_type.and_then(|user_type| parse_details(&mut fields, user_type));

    match (details, email, mobile_number, country, products_available) {
        (Some(details), Some(email), Some(mobile_number), Some(country), Some(products_available))
            if fields.is_clean() =>
        {
            Ok(SupplierSubmission {
                details,
                email,
                mobile_number,
                country,
                products_available,
                certifications,
                other_certification_name,
                is_organic,
            })
        }
        _ => Err(fields.into_issues()),
    }
}

fn parse_certifications(fields: &mut FormFields<'_>, items: &[Value]) -> Vec<Certification> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let certification = item.as_str().and_then(|label| label.parse().ok());
            if certification.is_none() {
                fields.push(
                    ValidationIssue::new(
                        IssueCode::InvalidEnumValue,
                        "certifications",
                        "Unknown certification",
                    )
                    .at_index(index),
                );
            }
            certification
        })
        .collect()
}

fn parse_details(
    fields: &mut FormFields<'_>,
    user_type: SupplierUserType,
) -> Option<SupplierDetails> {
    let required = user_type.required_fields();
    if required.iter().any(|field| !fields.is_truthy(field)) {
        fields.push(ValidationIssue::new(
            IssueCode::MissingGroupFields,
            required[0],
            user_type.group_message(),
        ));
        return None;
    }

    // Every field is filled in at this point, but may still not be a string.
    let mut detail = |field: &str| {
        fields.required_str(field).and_then(|value| {
            fields.check(field, SupplierDetail::try_from(value), |_| {
                (IssueCode::TooSmall, user_type.group_message())
            })
        })
    };

    let details = match user_type {
        SupplierUserType::CoffeeEstateOwner => {
            let estate_name = detail("estateName");
            let estate_owner_name = detail("estateOwnerName");
            let survey_number = detail("surveyNumber");
            let address = detail("address");
            SupplierDetails::CoffeeEstateOwner {
                estate_name: estate_name?,
                estate_owner_name: estate_owner_name?,
                survey_number: survey_number?,
                address: address?,
            }
        }
        SupplierUserType::FpoMember => {
            let fpo_name = detail("fpoName");
            let fpo_address = detail("fpoAddress");
            let registration_number = detail("registrationNumber");
            let member_name = detail("memberName");
            SupplierDetails::FpoMember {
                fpo_name: fpo_name?,
                fpo_address: fpo_address?,
                registration_number: registration_number?,
                member_name: member_name?,
            }
        }
        SupplierUserType::CuringWorks => {
            let promoter_name = detail("promoterName");
            let licence_number = detail("licenceNumber");
            let curing_works_address = detail("curingWorksAddress");
            let contact_person = detail("contactPerson");
            SupplierDetails::CuringWorks {
                promoter_name: promoter_name?,
                licence_number: licence_number?,
                curing_works_address: curing_works_address?,
                contact_person: contact_person?,
            }
        }
        SupplierUserType::IndividualFarmer => {
            let full_name = detail("fullName");
            let aadhar_card_number = detail("aadharCardNumber");
            SupplierDetails::IndividualFarmer {
                full_name: full_name?,
                aadhar_card_number: aadhar_card_number?,
            }
        }
        SupplierUserType::BrokerTrader => {
            let full_name = detail("fullName");
            let registration_number = detail("registrationNumber");
            let address = detail("address");
            SupplierDetails::BrokerTrader {
                full_name: full_name?,
                registration_number: registration_number?,
                address: address?,
            }
        }
    };

    Some(details)
}
