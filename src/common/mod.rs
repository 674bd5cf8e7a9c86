use std::thread;
use std::thread::JoinHandle;

pub mod peer_notifier;

pub fn run_worker_thread<T: Send + 'static, F: FnOnce(T) + Send + 'static>(
    worker: F,
    params: T,
) -> JoinHandle<()> {
    thread::spawn(move || worker(params))
}

/// Named worker thread handle.
#[derive(Debug)]
pub struct Worker {
    name: String,
    join_handle: JoinHandle<()>,
}

impl Worker {
    pub fn run<T: Send + 'static, F: FnOnce(T) + Send + 'static>(
        name: String,
        worker: F,
        params: T,
    ) -> Worker {
        let join_handle = run_worker_thread(worker, params);

        Worker { name, join_handle }
    }

    pub fn join(self) {
        let join_result = self.join_handle.join();
        if join_result.is_err() {
            error!("Worker {} returned an error", self.name)
        }
    }
}
