pub mod storage;
pub mod transport;
pub mod upload_service;
