//! Integration tests for credential persistence on NOR flash.

mod common;

use common::RamFlash;
use web2wire_core::{
    credentials::{CREDENTIALS_RECORD_SIZE, CREDENTIALS_STORAGE_SIZE, WifiCredentials},
    storage::{NorFlashDriver, PersistentStorage, StorageError},
};

const OFFSET: u32 = 0x1000;

type CredentialStorage = PersistentStorage<NorFlashDriver<RamFlash>, CREDENTIALS_STORAGE_SIZE>;

fn storage(flash: RamFlash) -> CredentialStorage {
    PersistentStorage::new(NorFlashDriver::new(flash, OFFSET))
}

// -----------------------------------------------------------------------------
// Test 1: Round trip through flash
// -----------------------------------------------------------------------------

#[test]
fn saved_credentials_load_back() {
    let mut storage = storage(RamFlash::new(0x4000));
    let credentials = WifiCredentials::new("Lab Net", "hunter22").unwrap();

    storage.save::<CREDENTIALS_RECORD_SIZE, _>(&credentials).unwrap();
    let loaded: WifiCredentials = storage.load::<CREDENTIALS_RECORD_SIZE, _>().unwrap();

    assert_eq!(loaded, credentials);
}

#[test]
fn saving_twice_keeps_latest() {
    let mut storage = storage(RamFlash::new(0x4000));
    let first = WifiCredentials::new("first-network", "long-password").unwrap();
    let second = WifiCredentials::new("second", "").unwrap();
    storage.save::<CREDENTIALS_RECORD_SIZE, _>(&first).unwrap();
    storage.save::<CREDENTIALS_RECORD_SIZE, _>(&second).unwrap();

    let loaded: WifiCredentials = storage.load::<CREDENTIALS_RECORD_SIZE, _>().unwrap();

    assert_eq!(loaded.ssid.as_str(), "second");
    assert!(loaded.password.is_empty());
}

#[test]
fn writes_erase_the_block_first() {
    let mut flash_storage = storage(RamFlash::new(0x4000));
    flash_storage
        .save::<CREDENTIALS_RECORD_SIZE, _>(&WifiCredentials::new("net", "pw").unwrap())
        .unwrap();

    let flash = flash_storage.into_driver().into_inner();
    assert_eq!(flash.erase_count, 1);
    assert_eq!(&flash.data[OFFSET as usize..OFFSET as usize + 2], &0xBEEFu16.to_le_bytes());
}

// -----------------------------------------------------------------------------
// Test 2: Missing and damaged records
// -----------------------------------------------------------------------------

#[test]
fn erased_flash_has_no_credentials() {
    let mut storage = storage(RamFlash::new(0x4000));

    assert_eq!(
        storage.load::<CREDENTIALS_RECORD_SIZE, WifiCredentials>().err(),
        Some(StorageError::InvalidMagicHeader)
    );
}

#[test]
fn foreign_record_is_invalid_data() {
    let mut flash = RamFlash::new(0x4000);
    let start = OFFSET as usize;
    flash.data[start..start + 2].copy_from_slice(&0xBEEFu16.to_le_bytes());
    flash.data[start + 2..start + CREDENTIALS_STORAGE_SIZE].fill(0);
    let mut storage = storage(flash);

    assert_eq!(
        storage.load::<CREDENTIALS_RECORD_SIZE, WifiCredentials>().err(),
        Some(StorageError::InvalidData)
    );
}

#[test]
fn flash_failure_is_a_driver_error() {
    let mut flash = RamFlash::new(0x4000);
    flash.fail_writes = true;
    let mut storage = storage(flash);

    assert_eq!(
        storage.save::<CREDENTIALS_RECORD_SIZE, _>(&WifiCredentials::new("net", "pw").unwrap()),
        Err(StorageError::DriverError)
    );
}

#[test]
fn out_of_range_partition_is_a_driver_error() {
    let mut storage: CredentialStorage =
        PersistentStorage::new(NorFlashDriver::new(RamFlash::new(0x1000), 0x2000));

    assert_eq!(
        storage.load::<CREDENTIALS_RECORD_SIZE, WifiCredentials>().err(),
        Some(StorageError::DriverError)
    );
}
