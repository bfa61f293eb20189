/// Concurrent dispatcher — one worker thread per chunk, fan-in over a
/// channel, join before returning.
///
/// Workers share nothing mutable. Each one counts its chunk sequentially,
/// builds its own batch of results, and sends that batch exactly once.
/// The dispatcher receives one batch per chunk, and the thread scope joins
/// every worker, so no partial result set is ever returned.
use crate::error::ScanError;
use crate::model::ScanResult;
use crate::scanner::counter::DirCounter;
use crate::scanner::partition::WorkChunk;
use std::thread;
use tracing::debug;

/// Count every target in `chunks` concurrently.
///
/// Returns exactly one [`ScanResult`] per target, in unspecified order
/// across chunks. A target whose walk fails becomes a failed result; its
/// worker carries on with the next target and other workers are unaffected.
pub fn dispatch<C>(chunks: &[WorkChunk<'_>], counter: &C) -> Result<Vec<ScanResult>, ScanError>
where
    C: DirCounter + ?Sized,
{
    let total: usize = chunks.iter().map(|chunk| chunk.targets.len()).sum();
    let (batch_tx, batch_rx) = crossbeam_channel::bounded::<Vec<ScanResult>>(chunks.len());

    thread::scope(|scope| -> Result<Vec<ScanResult>, ScanError> {
        for &chunk in chunks {
            let batch_tx = batch_tx.clone();
            thread::Builder::new()
                .name(format!("filecount-worker-{}", chunk.worker))
                .spawn_scoped(scope, move || {
                    // Capacity covers every batch, and the receiver outlives the scope.
                    let _ = batch_tx.send(count_chunk(chunk, counter));
                })
                .map_err(|source| ScanError::Spawn {
                    worker: chunk.worker,
                    source,
                })?;
        }
        drop(batch_tx);

        let mut results = Vec::with_capacity(total);
        for _ in chunks {
            match batch_rx.recv() {
                Ok(batch) => results.extend(batch),
                // A worker panicked before sending; the scope re-raises it.
                Err(_) => break,
            }
        }
        debug!(
            "Collected {} results from {} workers",
            results.len(),
            chunks.len()
        );
        Ok(results)
    })
}

/// Count one chunk on the current thread, target by target.
fn count_chunk<C>(chunk: WorkChunk<'_>, counter: &C) -> Vec<ScanResult>
where
    C: DirCounter + ?Sized,
{
    chunk
        .targets
        .iter()
        .map(|target| {
            debug!("worker {} counting files in: {}", chunk.worker, target);
            match counter.count(target.as_path(), chunk.worker) {
                Ok(count) => ScanResult::success(target.clone(), count),
                Err(err) => {
                    debug!("worker {}: {err}", chunk.worker);
                    ScanResult::failure(target.clone(), err.partial)
                }
            }
        })
        .collect()
}
