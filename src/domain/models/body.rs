use std::io;

use bytes::{Bytes, BytesMut};
use futures::{stream::BoxStream, Stream, StreamExt, TryStreamExt};
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;

/// Streaming body of a fetched object
pub struct ObjectBody {
    stream: BoxStream<'static, io::Result<Bytes>>,
}

impl ObjectBody {
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        Self {
            stream: stream.boxed(),
        }
    }

    pub fn empty() -> Self {
        Self::from_stream(futures::stream::empty())
    }

    /// Collect the whole body into memory
    pub async fn bytes(self) -> io::Result<Bytes> {
        let buffer = self
            .stream
            .try_fold(BytesMut::new(), |mut buffer, chunk| async move {
                buffer.extend_from_slice(&chunk);
                Ok(buffer)
            })
            .await?;
        Ok(buffer.freeze())
    }

    /// Collect the body and decode it as UTF-8
    pub async fn text(self) -> io::Result<String> {
        let bytes = self.bytes().await?;
        String::from_utf8(bytes.to_vec()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn into_stream(self) -> BoxStream<'static, io::Result<Bytes>> {
        self.stream
    }

    pub fn into_async_read(self) -> impl AsyncRead + Send + Unpin {
        StreamReader::new(self.stream)
    }
}

impl std::fmt::Debug for ObjectBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectBody").finish_non_exhaustive()
    }
}

impl Default for ObjectBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Bytes> for ObjectBody {
    fn from(bytes: Bytes) -> Self {
        Self::from_stream(futures::stream::once(async move { Ok(bytes) }))
    }
}

impl From<Vec<u8>> for ObjectBody {
    fn from(data: Vec<u8>) -> Self {
        Bytes::from(data).into()
    }
}

impl From<&'static str> for ObjectBody {
    fn from(text: &'static str) -> Self {
        Bytes::from_static(text.as_bytes()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_collects_chunked_stream() {
        let body = ObjectBody::from_stream(async_stream::stream! {
            yield Ok(Bytes::from_static(b"hello "));
            yield Ok(Bytes::from_static(b"world"));
        });

        assert_eq!(body.text().await.unwrap(), "hello world");
    }

    #[tokio::test]
    async fn test_stream_error_surfaces() {
        let body = ObjectBody::from_stream(async_stream::stream! {
            yield Ok(Bytes::from_static(b"partial"));
            yield Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        });

        let err = body.bytes().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_invalid_data() {
        let body = ObjectBody::from(vec![0xff, 0xfe]);
        let err = body.text().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_async_read_adapter() {
        let mut reader = ObjectBody::from("read me").into_async_read();
        let mut out = String::new();
        reader.read_to_string(&mut out).await.unwrap();
        assert_eq!(out, "read me");
        assert!(ObjectBody::empty().bytes().await.unwrap().is_empty());
    }
}
