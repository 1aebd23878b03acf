//! Wire-level constants for the Dinero API
//!
//! Centralized location for endpoints and defaults shared by every crate.

pub const DEFAULT_API_BASE_URL: &str = "https://api.dinero.dk/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://authz.dinero.dk/dineroapi/oauth/token";

/// Per-request timeout applied when the config does not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

pub const TOKEN_SCOPE: &str = "read write";
pub const TOKEN_GRANT_TYPE: &str = "password";

/// Projection requested when searching contacts.
pub const CONTACT_FIELDS: &str = "Name,ContactGuid,ExternalReference,IsPerson,Street,ZipCode,\
                                  City,CountryKey,Phone,Email,Webpage,AttPerson,VatNumber,\
                                  EanNumber,PaymentConditionType,PaymentConditionNumberOfDays";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
