use kaapi_core_contact_impl::ContactFeatureServiceImpl;
use kaapi_core_supplier_impl::SupplierFeatureServiceImpl;

// API
pub type RestServer = kaapi_api_rest::RestServer<ContactFeature, SupplierFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl;
pub type SupplierFeature = SupplierFeatureServiceImpl;
