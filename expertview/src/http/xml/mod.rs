pub(crate) mod envelope;
pub(crate) mod file_list;
pub(crate) mod installations;
