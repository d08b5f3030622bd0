mod field;
mod region;
mod request;
mod request_type;
mod validation;

pub use field::Field;
pub use region::Region;
pub use request::AllocationRequest;
pub use request_type::RequestType;
pub use validation::{
    ValidationError, normalize_yes_no, parse_list, validate_email, validate_url, validate_username,
};
