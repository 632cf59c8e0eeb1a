//! Integration tests for the channel contracts
//!
//! Exercises the trait seams with small in-memory transports: a loopback
//! command channel that replays scripted output, and a sync session that
//! buffers pushed bytes. The package-management core drives the real
//! contracts the same way.

use async_trait::async_trait;
use droidmgr_channel::{
    CancelSignal, CommandChannel, InstallOutcomeConsumer, LineConsumer, PackageListConsumer,
    SyncChannel, TransferProgress,
};
use droidmgr_errors::{ChannelError, Error};
use droidmgr_types::{Device, DeviceState};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::SystemTime;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Replays canned output lines for each known command
struct LoopbackChannel {
    scripts: HashMap<String, Vec<String>>,
}

#[async_trait]
impl CommandChannel for LoopbackChannel {
    async fn execute(
        &self,
        _device: &Device,
        command: &str,
        consumer: Option<&mut dyn LineConsumer>,
    ) -> Result<(), Error> {
        let Some(lines) = self.scripts.get(command) else {
            return Err(ChannelError::CommandFailed {
                command: command.to_string(),
                message: "no script for command".to_string(),
            }
            .into());
        };
        if let Some(consumer) = consumer {
            for line in lines {
                consumer.on_line(line);
            }
            consumer.done();
        }
        Ok(())
    }
}

/// Buffers pushed bytes and remembers the transfer parameters
#[derive(Default)]
struct BufferSession {
    pushed: Mutex<Vec<(String, u32, Vec<u8>)>>,
}

#[async_trait]
impl SyncChannel for BufferSession {
    async fn push(
        &mut self,
        source: &mut (dyn AsyncRead + Send + Unpin),
        remote_path: &str,
        mode: u32,
        _modified: SystemTime,
        progress: Option<&dyn TransferProgress>,
        cancel: Option<&CancelSignal>,
    ) -> Result<(), Error> {
        let mut contents = Vec::new();
        let mut chunk = [0u8; 64];
        loop {
            if cancel.is_some_and(CancelSignal::is_cancelled) {
                return Err(Error::Cancelled);
            }
            let n = source.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            contents.extend_from_slice(&chunk[..n]);
            if let Some(progress) = progress {
                progress.transferred(contents.len() as u64);
            }
        }
        self.pushed
            .lock()
            .unwrap()
            .push((remote_path.to_string(), mode, contents));
        Ok(())
    }
}

fn online_device() -> Device {
    Device::new("emulator-5554", DeviceState::Online)
}

#[tokio::test]
async fn listing_consumer_accumulates_over_a_channel_call() {
    let channel = LoopbackChannel {
        scripts: HashMap::from([(
            "pm list packages -f".to_string(),
            vec![
                "package:/data/app/com.example.app-1.apk=com.example.app".to_string(),
                "package:/system/app/Shell.apk=com.android.shell".to_string(),
            ],
        )]),
    };
    let mut consumer = PackageListConsumer::new();
    channel
        .execute(&online_device(), "pm list packages -f", Some(&mut consumer))
        .await
        .unwrap();
    assert_eq!(consumer.entries().len(), 2);
}

#[tokio::test]
async fn channel_failure_is_a_channel_error() {
    let channel = LoopbackChannel {
        scripts: HashMap::new(),
    };
    let mut consumer = InstallOutcomeConsumer::new();
    let err = channel
        .execute(&online_device(), "pm install /tmp/x.apk", Some(&mut consumer))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Channel(_)));
}

#[tokio::test]
async fn push_transfers_bytes_with_mode() {
    let mut session = BufferSession::default();
    let mut source: &[u8] = b"apk bytes";
    session
        .push(
            &mut source,
            "/data/local/tmp/app.apk",
            0o644,
            SystemTime::now(),
            None,
            None,
        )
        .await
        .unwrap();
    let pushed = session.pushed.lock().unwrap();
    assert_eq!(pushed.len(), 1);
    let (path, mode, contents) = &pushed[0];
    assert_eq!(path, "/data/local/tmp/app.apk");
    assert_eq!(*mode, 0o644);
    assert_eq!(contents, b"apk bytes");
}

#[tokio::test]
async fn cancelled_push_fails_without_recording_a_transfer() {
    let mut session = BufferSession::default();
    let signal = CancelSignal::new();
    signal.cancel();
    let mut source: &[u8] = b"apk bytes";
    let err = session
        .push(
            &mut source,
            "/data/local/tmp/app.apk",
            0o644,
            SystemTime::now(),
            None,
            Some(&signal),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert!(session.pushed.lock().unwrap().is_empty());
}
