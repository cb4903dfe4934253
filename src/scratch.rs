// Heap buffers for secret-dependent hash inputs. Allocation failure is
// reported as Error::NoMemory instead of aborting; the contents are
// zeroized when the buffer is dropped, on every exit path.

use zeroize::Zeroize;
use crate::{Error, Result, Vec};

pub(crate) struct Scratch {
    buf: Vec<u8>,
}

impl Scratch {

    // Allocate a zero-filled buffer of exactly `len` bytes.
    pub(crate) fn new(len: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).map_err(|_| Error::NoMemory)?;
        buf.resize(len, 0u8);
        Ok(Self { buf })
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.buf[..]
    }

    #[inline(always)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf[..]
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

#[cfg(test)]
mod tests {

    use super::Scratch;

    #[test]
    fn scratch_alloc() {
        let mut s = Scratch::new(100).unwrap();
        assert_eq!(s.as_slice().len(), 100);
        assert!(s.as_slice().iter().all(|&b| b == 0));
        s.as_mut_slice()[10] = 0x5A;
        assert_eq!(s.as_slice()[10], 0x5A);

        let e = Scratch::new(0).unwrap();
        assert_eq!(e.as_slice().len(), 0);
        assert!(Scratch::new(usize::MAX).is_err());
    }
}
