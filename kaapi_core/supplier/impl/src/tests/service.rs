use kaapi_core_supplier_contracts::SupplierFeatureService;
use kaapi_demo::supplier::{CURING_WORKS, FPO_MEMBER};
use kaapi_models::supplier::SupplierUserType;
use kaapi_utils::assert_matches;

use super::without;
use crate::SupplierFeatureServiceImpl;

#[test]
fn ok() {
    // Arrange
    let sut = SupplierFeatureServiceImpl;

    // Act
    let result = sut.register(&CURING_WORKS);

    // Assert
    assert_eq!(result.unwrap().user_type(), SupplierUserType::CuringWorks);
}

#[test]
fn invalid() {
    // Arrange
    let sut = SupplierFeatureServiceImpl;
    let payload = without(&FPO_MEMBER, &["memberName"]);

    // Act
    let result = sut.register(&payload);

    // Assert
    assert_matches!(result, Err(issues) if issues.len() == 1);
}
