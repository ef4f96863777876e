//! Record storage on NOR flash
//!
//! A record is stored as a little-endian magic header followed by the
//! encoded value. Erased flash reads as `0xFF`, so a partition that was
//! never written fails the magic check and loads as "nothing stored".

use embedded_storage::nor_flash::{NorFlash, NorFlashError};

const MAGIC_HEADER: u16 = 0xBEEF;
pub const MAGIC_HEADER_SIZE: usize = MAGIC_HEADER.to_le_bytes().len();

/// Erase granularity of the flash partition
pub const BLOCK_SIZE: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    DriverError,
    InvalidMagicHeader,
    InvalidData,
    /// Record does not match the storage slot size
    SizeMismatch,
}

pub trait Encodable<const SIZE: usize>
where
    Self: Sized,
{
    fn encode(&self) -> [u8; SIZE];
    fn decode(data: &[u8]) -> Option<Self>;
}

pub trait StorageDriver {
    fn read(&mut self, buffer: &mut [u8]) -> Result<(), StorageError>;
    fn write(&mut self, buffer: &[u8]) -> Result<(), StorageError>;
}

/// Persistent storage of one record of `STORAGE_SIZE` bytes, header included
pub struct PersistentStorage<DRIVER: StorageDriver, const STORAGE_SIZE: usize> {
    driver: DRIVER,
}

impl<DRIVER: StorageDriver, const STORAGE_SIZE: usize>
    PersistentStorage<DRIVER, STORAGE_SIZE>
{
    pub fn new(driver: DRIVER) -> Self {
        Self { driver }
    }

    pub fn into_driver(self) -> DRIVER {
        self.driver
    }

    /// Load the stored record
    pub fn load<const SIZE: usize, T: Encodable<SIZE>>(
        &mut self,
    ) -> Result<T, StorageError> {
        if SIZE + MAGIC_HEADER_SIZE != STORAGE_SIZE {
            return Err(StorageError::SizeMismatch);
        }

        let mut buffer = [0u8; STORAGE_SIZE];
        self.driver.read(&mut buffer)?;

        let magic = u16::from_le_bytes([buffer[0], buffer[1]]);
        if magic != MAGIC_HEADER {
            return Err(StorageError::InvalidMagicHeader);
        }

        T::decode(&buffer[MAGIC_HEADER_SIZE..]).ok_or(StorageError::InvalidData)
    }

    /// Replace the stored record
    pub fn save<const SIZE: usize, T: Encodable<SIZE>>(
        &mut self,
        value: &T,
    ) -> Result<(), StorageError> {
        if SIZE + MAGIC_HEADER_SIZE != STORAGE_SIZE {
            return Err(StorageError::SizeMismatch);
        }

        let mut data = [0u8; STORAGE_SIZE];
        data[..MAGIC_HEADER_SIZE].copy_from_slice(&MAGIC_HEADER.to_le_bytes());
        data[MAGIC_HEADER_SIZE..].copy_from_slice(&value.encode());

        self.driver.write(&data)
    }
}

/// Storage driver over a NOR flash region starting at `offset`
///
/// Writes erase the whole block first.
pub struct NorFlashDriver<F: NorFlash> {
    flash: F,
    offset: u32,
}

impl<F: NorFlash> NorFlashDriver<F> {
    pub fn new(flash: F, offset: u32) -> Self {
        Self { flash, offset }
    }

    pub fn into_inner(self) -> F {
        self.flash
    }
}

impl<F: NorFlash> StorageDriver for NorFlashDriver<F> {
    fn read(&mut self, buffer: &mut [u8]) -> Result<(), StorageError> {
        self.flash.read(self.offset, buffer).map_err(|e| {
            log::error!("storage: flash read failed: {:?}", e.kind());
            StorageError::DriverError
        })
    }

    fn write(&mut self, buffer: &[u8]) -> Result<(), StorageError> {
        self.flash
            .erase(self.offset, self.offset + BLOCK_SIZE)
            .map_err(|e| {
                log::error!("storage: flash erase failed: {:?}", e.kind());
                StorageError::DriverError
            })?;
        self.flash.write(self.offset, buffer).map_err(|e| {
            log::error!("storage: flash write failed: {:?}", e.kind());
            StorageError::DriverError
        })
    }
}
