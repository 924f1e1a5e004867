//! Versioned request/response bodies.
//!
//! Every Kafka RPC body is encoded differently depending on the negotiated
//! API version, so plain `ReadType`/`WriteType` (which know nothing about
//! versions) aren't enough here. `ReadVersionedType`/`WriteVersionedType`
//! thread an [`ApiVersion`] through the call, and [`RequestBody`] ties a
//! request type to its response type, API key and supported version range --
//! the contract the rest of the crate dispatches against.

pub mod api_versions;
pub mod header;

pub mod add_offsets_to_txn;
pub mod add_partitions_to_txn;
pub mod alter_configs;
pub mod create_acls;
pub mod create_partitions;
pub mod create_topics;
pub mod delete_acls;
pub mod delete_groups;
pub mod delete_records;
pub mod delete_topics;
pub mod describe_acls;
pub mod describe_configs;
pub mod describe_groups;
pub mod end_txn;
pub mod fetch;
pub mod find_coordinator;
pub mod heartbeat;
pub mod init_producer_id;
pub mod join_group;
pub mod leave_group;
pub mod list_groups;
pub mod list_offsets;
pub mod metadata;
pub mod offset_commit;
pub mod offset_fetch;
pub mod produce;
pub mod sasl_authenticate;
pub mod sasl_handshake;
pub mod sync_group;
pub mod txn_offset_commit;

use std::io::{Read, Write};

use thiserror::Error;

use super::api_key::ApiKey;
use super::api_version::ApiVersionRange;
use super::traits::{ReadError, WriteError};

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReadVersionedError {
    #[error(transparent)]
    ReadError(#[from] ReadError),

    #[error("unsupported version: {0:?}")]
    UnsupportedVersion(super::api_version::ApiVersion),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WriteVersionedError {
    #[error(transparent)]
    WriteError(#[from] WriteError),

    #[error("unsupported version: {0:?}")]
    UnsupportedVersion(super::api_version::ApiVersion),
}

/// A request or response body that knows how to decode itself for a given
/// [`super::api_version::ApiVersion`].
pub trait ReadVersionedType<R>: Sized
where
    R: Read,
{
    fn read_versioned(
        reader: &mut R,
        version: super::api_version::ApiVersion,
    ) -> Result<Self, ReadVersionedError>;
}

/// A request or response body that knows how to encode itself for a given
/// [`super::api_version::ApiVersion`].
pub trait WriteVersionedType<W>: Sized
where
    W: Write,
{
    fn write_versioned(
        &self,
        writer: &mut W,
        version: super::api_version::ApiVersion,
    ) -> Result<(), WriteVersionedError>;
}

/// Binds a request type to the API it belongs to: its [`ApiKey`], the range
/// of versions it supports, and the response type the broker decodes in
/// reply.
///
/// This is the crate's analogue of a request factory: given a body and a
/// negotiated version, the broker driver knows exactly what bytes to send
/// and what type to parse back.
pub trait RequestBody {
    type ResponseBody;

    const API_KEY: ApiKey;

    const API_VERSION_RANGE: ApiVersionRange;
}

/// Reads an `ARRAY<T>` of versioned elements, matching Kafka's convention
/// that a negative length is an empty (never null) array at this layer.
pub fn read_versioned_array<R, T>(
    reader: &mut R,
    version: super::api_version::ApiVersion,
) -> Result<Vec<T>, ReadVersionedError>
where
    R: Read,
    T: ReadVersionedType<R>,
{
    use super::traits::ReadType;

    let len = i32::read(reader).map_err(ReadVersionedError::ReadError)?;
    if len < 0 {
        return Ok(vec![]);
    }
    let len = usize::try_from(len).map_err(|e| ReadVersionedError::ReadError(e.into()))?;
    let mut out = Vec::with_capacity(len.min(4096));
    for _ in 0..len {
        out.push(T::read_versioned(reader, version)?);
    }
    Ok(out)
}

/// Writes an `ARRAY<T>` of versioned elements.
pub fn write_versioned_array<W, T>(
    writer: &mut W,
    items: &[T],
    version: super::api_version::ApiVersion,
) -> Result<(), WriteVersionedError>
where
    W: Write,
    T: WriteVersionedType<W>,
{
    use super::traits::WriteType;

    let len = i32::try_from(items.len()).map_err(|e| WriteVersionedError::WriteError(e.into()))?;
    len.write(writer).map_err(WriteVersionedError::WriteError)?;
    for item in items {
        item.write_versioned(writer, version)?;
    }
    Ok(())
}
