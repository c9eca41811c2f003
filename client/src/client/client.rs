use log::{debug, warn};

use tickdiff_shared::{
    BitReader, Protocol, ReceiveError, ReceiveReport, RemoteWorldReader, WorldMutType,
};

use crate::ClientConfig;

/// The receiving side of replication. Applies buffers produced by a Server
/// built from the same Protocol.
pub struct Client {
    config: ClientConfig,
    protocol: Protocol,
    applied_total: u64,
    skipped_total: u64,
}

impl Client {
    /// Create a new Client
    pub fn new<P: Into<Protocol>>(client_config: ClientConfig, protocol: P) -> Self {
        Self {
            config: client_config,
            protocol: protocol.into(),
            applied_total: 0,
            skipped_total: 0,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Decodes one buffer and applies each record to `world`.
    ///
    /// Records that cannot be placed are listed in the report and do not stop
    /// the read. A malformed buffer returns an error; records applied before the
    /// fault remain applied.
    pub fn receive<W: WorldMutType>(
        &mut self,
        world: &mut W,
        buffer: &[u8],
    ) -> Result<ReceiveReport, ReceiveError> {
        let mut reader = BitReader::new(buffer);
        let result = RemoteWorldReader::read_records(
            world,
            &self.protocol.component_kinds,
            &self.protocol.types,
            &mut reader,
            self.config.max_path_length,
        );

        match &result {
            Ok(report) => {
                self.applied_total += report.applied as u64;
                self.skipped_total += report.skipped.len() as u64;
                debug!(
                    "Client: applied {} records, skipped {}",
                    report.applied,
                    report.skipped.len()
                );
            }
            Err(ReceiveError::Malformed {
                applied,
                skipped,
                source,
            }) => {
                self.applied_total += *applied as u64;
                self.skipped_total += skipped.len() as u64;
                warn!(
                    "Client: dropped rest of buffer after {} records ({} skipped): {}",
                    applied,
                    skipped.len(),
                    source
                );
            }
        }

        result
    }

    /// Records applied since the Client was created
    pub fn applied_total(&self) -> u64 {
        self.applied_total
    }

    /// Records read but skipped since the Client was created
    pub fn skipped_total(&self) -> u64 {
        self.skipped_total
    }
}
