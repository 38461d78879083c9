pub mod inventory;
pub mod storage;
