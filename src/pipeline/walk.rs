//! Walker task: one task per directory, children spawned onto the current rayon pool.

use crossbeam_channel::Sender;
use std::path::PathBuf;
use std::sync::Arc;

use super::context::WalkContext;
use super::reader::dirents;

/// Marks its task done in the tracker when dropped, even during unwinding.
struct DoneGuard(Arc<WalkContext>);

impl Drop for DoneGuard {
    fn drop(&mut self) {
        self.0.tracker.done();
    }
}

/// A registered walker task. Fields drop in declaration order: the size sender is released
/// before the task is marked done, so the tracker never reaches zero while a sender lives.
struct WalkerTask {
    dir: PathBuf,
    sizes: Sender<u64>,
    done: DoneGuard,
}

/// Register a walker task for `dir` and hand it to the pool.
///
/// Must be called from inside the walk's thread pool (a worker thread or `ThreadPool::install`)
/// so the task lands on that pool rather than rayon's global one.
pub fn spawn_walker(dir: PathBuf, ctx: Arc<WalkContext>, sizes: Sender<u64>) {
    ctx.tracker.register();
    let task = WalkerTask {
        dir,
        sizes,
        done: DoneGuard(ctx),
    };
    rayon::spawn(move || walk_dir(task));
}

/// Process one directory: files go to the size channel, subdirectories become new tasks.
fn walk_dir(task: WalkerTask) {
    let ctx = &task.done.0;
    for entry in dirents(&task.dir, ctx) {
        if entry.is_dir {
            spawn_walker(
                task.dir.join(&entry.name),
                Arc::clone(ctx),
                task.sizes.clone(),
            );
        } else if task.sizes.send(entry.size).is_err() {
            log::debug!("size channel disconnected, abandoning {}", task.dir.display());
            break;
        }
    }
}
