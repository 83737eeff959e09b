//! The map I/O seam behind `load` and `save`.
//!
//! File formats, compression and encodings live with the host. The
//! interpreter hands over a path and receives an opaque [`MapValue`], or
//! hands one back to be written.

use crate::MapValue;
use std::fmt;
use thiserror::Error;

/// Failure reported by a [`MapIo`] implementation. Shown to scripts after a
/// `load error: ` or `save error: ` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MapIoError {
    pub message: String,
}

impl MapIoError {
    pub fn new(message: impl fmt::Display) -> Self {
        MapIoError {
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for MapIoError {
    fn from(err: std::io::Error) -> Self {
        MapIoError::new(err)
    }
}

/// Reads and writes map files for the `load` and `save` built-ins.
pub trait MapIo {
    fn load(&self, path: &str) -> Result<MapValue, MapIoError>;

    fn save(&self, map: &MapValue, path: &str) -> Result<(), MapIoError>;
}

/// Fails every request. Used when the host supplies no map I/O.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnsupportedMapIo;

impl MapIo for UnsupportedMapIo {
    fn load(&self, _path: &str) -> Result<MapValue, MapIoError> {
        Err(MapIoError::new("load not implemented"))
    }

    fn save(&self, _map: &MapValue, _path: &str) -> Result<(), MapIoError> {
        Err(MapIoError::new("save not implemented"))
    }
}

/// [`MapIo`] built from a pair of closures. See [`map_io_fn`].
pub struct FnMapIo<L, S> {
    load: L,
    save: S,
}

impl<L, S> MapIo for FnMapIo<L, S>
where
    L: Fn(&str) -> Result<MapValue, MapIoError>,
    S: Fn(&MapValue, &str) -> Result<(), MapIoError>,
{
    fn load(&self, path: &str) -> Result<MapValue, MapIoError> {
        (self.load)(path)
    }

    fn save(&self, map: &MapValue, path: &str) -> Result<(), MapIoError> {
        (self.save)(map, path)
    }
}

/// Adapt two closures into a [`MapIo`].
pub fn map_io_fn<L, S>(load: L, save: S) -> FnMapIo<L, S>
where
    L: Fn(&str) -> Result<MapValue, MapIoError>,
    S: Fn(&MapValue, &str) -> Result<(), MapIoError>,
{
    FnMapIo { load, save }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unsupported_fails_both_ways() {
        let io = UnsupportedMapIo;
        assert_eq!(
            io.load("a.wxx").map(|_| ()),
            Err(MapIoError::new("load not implemented"))
        );
        assert_eq!(
            io.save(&MapValue::new(()), "a.wxx"),
            Err(MapIoError::new("save not implemented"))
        );
    }

    #[test]
    fn closures_receive_arguments() {
        let io = map_io_fn(
            |path: &str| Ok(MapValue::new(path.to_string())),
            |map: &MapValue, path: &str| match map.downcast_ref::<String>() {
                Some(source) if source != path => Ok(()),
                _ => Err(MapIoError::new("refusing to overwrite source")),
            },
        );
        let map = io.load("in.wxx").map_err(|e| e.message);
        let map = match map {
            Ok(map) => map,
            Err(message) => panic!("load failed: {message}"),
        };
        assert_eq!(map.downcast_ref::<String>().map(String::as_str), Some("in.wxx"));
        assert_eq!(io.save(&map, "out.wxx"), Ok(()));
        assert_eq!(
            io.save(&map, "in.wxx").map_err(|e| e.to_string()),
            Err("refusing to overwrite source".to_string())
        );
    }

    #[test]
    fn io_errors_convert() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert_eq!(MapIoError::from(err).message, "no such file");
    }
}
