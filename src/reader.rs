use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use crate::buffer::{ReadStats, ResourceBuffer};
use crate::options::ReadOptions;
use crate::{ReadError, Result, GROWTH_FACTOR};

/// Receives `(capacity, length)` at every point the reader inspects its
/// buffer: before each fill and once more when the read is finished.
pub trait GrowthObserver {
    fn observe(&mut self, capacity: usize, length: usize);
}

impl<F> GrowthObserver for F
where
    F: FnMut(usize, usize),
{
    fn observe(&mut self, capacity: usize, length: usize) {
        self(capacity, length)
    }
}

/// Loads whole resources into memory without asking for their size first.
///
/// The buffer starts at [`ReadOptions::initial_capacity`] bytes and is
/// doubled every time a fill saturates it. A fill that comes back short
/// means the source has no more data.
#[derive(Clone, Debug, Default)]
pub struct WholeReader {
    options: ReadOptions,
}

impl WholeReader {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }

    /// Options this reader was created with.
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Open the file at `path` and read all of it.
    ///
    /// Fails with [`ReadError::ResourceUnavailable`] if the file cannot be
    /// opened or is a directory. In that case nothing is allocated.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<ResourceBuffer> {
        self.read_path_observed(path, |_: usize, _: usize| {})
    }

    /// Same as [`read_path`](Self::read_path), reporting to `observer`
    /// before each fill and once more after the last one.
    pub fn read_path_observed(
        &self,
        path: impl AsRef<Path>,
        mut observer: impl GrowthObserver,
    ) -> Result<ResourceBuffer> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ReadError::InvalidArgument(
                "resource path is empty".to_owned(),
            ));
        }
        self.verify_options()?;

        log::debug!("Reading {}", path.display());
        let file = open(path)?;
        self.load(file, &mut observer)
    }

    /// Read `source` until it signals end of data. The source is dropped
    /// before returning, whatever the outcome.
    pub fn read_from<R: Read>(&self, source: R) -> Result<ResourceBuffer> {
        self.read_from_observed(source, |_: usize, _: usize| {})
    }

    /// Same as [`read_from`](Self::read_from), reporting to `observer`
    /// before each fill and once more after the last one.
    pub fn read_from_observed<R: Read>(
        &self,
        source: R,
        mut observer: impl GrowthObserver,
    ) -> Result<ResourceBuffer> {
        self.verify_options()?;
        self.load(source, &mut observer)
    }

    fn verify_options(&self) -> Result<()> {
        if self.options.initial_capacity == 0 {
            return Err(ReadError::InvalidArgument(
                "initial capacity must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }

    fn load<R: Read>(
        &self,
        mut source: R,
        observer: &mut impl GrowthObserver,
    ) -> Result<ResourceBuffer> {
        let mut stats = ReadStats::default();
        let mut capacity = self.options.initial_capacity;

        let mut buf = Vec::new();
        reserve_with_terminator(&mut buf, capacity)?;
        buf.resize(capacity, 0);

        let mut len = 0;
        loop {
            observer.observe(capacity, len);

            let space = capacity - len;
            let n_read = fill(&mut source, &mut buf, &mut len).map_err(
                |source| ReadError::TransferFailure {
                    transferred: len,
                    source,
                },
            )?;
            stats.fills += 1;
            log::trace!(
                "fill {}: {} of {} bytes, length {}",
                stats.fills,
                n_read,
                space,
                len
            );

            if n_read < space {
                break;
            }

            // A saturated fill may have hit the exact end of the data.
            // The next fill will tell, at the price of one more growth.
            let new_capacity = capacity.saturating_mul(GROWTH_FACTOR);
            log::trace!("growing buffer {} -> {}", capacity, new_capacity);
            reserve_with_terminator(&mut buf, new_capacity)?;
            buf.resize(new_capacity, 0);
            capacity = new_capacity;
            stats.growths += 1;
        }

        drop(source);
        buf.truncate(len);
        observer.observe(capacity, len);

        stats.capacity = capacity;
        log::debug!(
            "{} bytes loaded in {} fills, {} growths",
            len,
            stats.fills,
            stats.growths
        );
        Ok(ResourceBuffer::terminate(buf, stats))
    }
}

/// Read the whole file at `path` with default [`ReadOptions`].
pub fn read_all(path: impl AsRef<Path>) -> Result<ResourceBuffer> {
    WholeReader::default().read_path(path)
}

fn open(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|e| ReadError::unavailable(path, e))?;
    let metadata = file
        .metadata()
        .map_err(|e| ReadError::unavailable(path, e))?;
    if metadata.is_dir() {
        return Err(ReadError::unavailable(
            path,
            io::Error::new(ErrorKind::InvalidInput, "resource is a directory"),
        ));
    }
    Ok(file)
}

/// Make sure `buf` can hold `capacity` bytes plus the terminator without
/// reallocating.
fn reserve_with_terminator(buf: &mut Vec<u8>, capacity: usize) -> Result<()> {
    let total = capacity.saturating_add(1);
    buf.try_reserve_exact(total - buf.len()).map_err(|source| {
        ReadError::AllocationFailure {
            requested: total,
            source,
        }
    })
}

/// Fill `buf[*len..]` until it is full or the source returns no more bytes.
/// `len` is advanced as bytes arrive, so it stays accurate on error.
fn fill<R: Read>(
    source: &mut R,
    buf: &mut [u8],
    len: &mut usize,
) -> io::Result<usize> {
    let start = *len;
    while *len < buf.len() {
        match source.read(&mut buf[*len..]) {
            Ok(0) => break,
            Ok(n) => *len += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(*len - start)
}
