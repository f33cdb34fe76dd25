use serde::Serialize;

use crate::{
    email_address::EmailAddress,
    macros::{label_enum, nutype_string},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSubmission {
    #[serde(flatten)]
    pub details: SupplierDetails,
    pub email: EmailAddress,
    pub mobile_number: MobileNumber,
    pub country: Country,
    pub products_available: ProductsAvailable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_certification_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_organic: Option<OrganicStatus>,
}

impl SupplierSubmission {
    pub fn user_type(&self) -> SupplierUserType {
        self.details.user_type()
    }
}

label_enum! {
    /// The kind of supplier registering. Decides which [`SupplierDetails`]
    /// have to be provided.
    pub enum SupplierUserType {
        CoffeeEstateOwner => "Coffee Estate Owner",
        FpoMember => "Member of Farmer-Producer Organisation",
        CuringWorks => "Coffee Curing Works",
        IndividualFarmer => "Individual Farmer",
        BrokerTrader => "Brokers / Traders",
    }
}

impl SupplierUserType {
    /// Fields that become mandatory for this user type, as named in the
    /// submitted form. Issues about an incomplete group are reported on the
    /// first one.
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::CoffeeEstateOwner => &["estateName", "estateOwnerName", "surveyNumber", "address"],
            Self::FpoMember => &["fpoName", "fpoAddress", "registrationNumber", "memberName"],
            Self::CuringWorks => &[
                "promoterName",
                "licenceNumber",
                "curingWorksAddress",
                "contactPerson",
            ],
            Self::IndividualFarmer => &["fullName", "aadharCardNumber"],
            Self::BrokerTrader => &["fullName", "registrationNumber", "address"],
        }
    }

    pub const fn group_message(self) -> &'static str {
        match self {
            Self::CoffeeEstateOwner => "All estate owner fields are required",
            Self::FpoMember => "All FPO member fields are required",
            Self::CuringWorks => "All curing works fields are required",
            Self::IndividualFarmer => "All individual farmer fields are required",
            Self::BrokerTrader => "All broker / trader fields are required",
        }
    }
}

/// The fields required by the selected [`SupplierUserType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "userType", rename_all_fields = "camelCase")]
pub enum SupplierDetails {
    #[serde(rename = "Coffee Estate Owner")]
    CoffeeEstateOwner {
        estate_name: SupplierDetail,
        estate_owner_name: SupplierDetail,
        survey_number: SupplierDetail,
        address: SupplierDetail,
    },
    #[serde(rename = "Member of Farmer-Producer Organisation")]
    FpoMember {
        fpo_name: SupplierDetail,
        fpo_address: SupplierDetail,
        registration_number: SupplierDetail,
        member_name: SupplierDetail,
    },
    #[serde(rename = "Coffee Curing Works")]
    CuringWorks {
        promoter_name: SupplierDetail,
        licence_number: SupplierDetail,
        curing_works_address: SupplierDetail,
        contact_person: SupplierDetail,
    },
    #[serde(rename = "Individual Farmer")]
    IndividualFarmer {
        full_name: SupplierDetail,
        aadhar_card_number: SupplierDetail,
    },
    #[serde(rename = "Brokers / Traders")]
    BrokerTrader {
        full_name: SupplierDetail,
        registration_number: SupplierDetail,
        address: SupplierDetail,
    },
}

impl SupplierDetails {
    pub fn user_type(&self) -> SupplierUserType {
        match self {
            Self::CoffeeEstateOwner { .. } => SupplierUserType::CoffeeEstateOwner,
            Self::FpoMember { .. } => SupplierUserType::FpoMember,
            Self::CuringWorks { .. } => SupplierUserType::CuringWorks,
            Self::IndividualFarmer { .. } => SupplierUserType::IndividualFarmer,
            Self::BrokerTrader { .. } => SupplierUserType::BrokerTrader,
        }
    }
}

label_enum! {
    pub enum Certification {
        Organic => "Organic",
        Fairtrade => "Fairtrade",
        RainforestAlliance => "Rainforest Alliance",
        Utz => "UTZ Certified",
        FourC => "4C",
        BirdFriendly => "Bird Friendly",
        CafePractices => "C.A.F.E. Practices",
        AnyOther => "Any Other",
    }
}

label_enum! {
    pub enum OrganicStatus {
        Yes => "Yes",
        No => "No",
    }
}

nutype_string!(MobileNumber(validate(len_char_min = MobileNumber::MIN_LENGTH)));
impl MobileNumber {
    pub const MIN_LENGTH: usize = 5;
}

nutype_string!(Country(validate(not_empty)));

nutype_string!(ProductsAvailable(validate(
    len_char_min = ProductsAvailable::MIN_LENGTH
)));
impl ProductsAvailable {
    pub const MIN_LENGTH: usize = 10;
}

nutype_string!(SupplierDetail(validate(not_empty)));
