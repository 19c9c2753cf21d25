pub mod device_type;
pub mod file_list;
pub mod installation_record;
pub mod record;
