//! Process-backed terminal: raw mode, stdin reader, SIGWINCH delivery.

use std::io;
use std::os::raw::c_int;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use signal_hook::iterator::Signals;

use crate::runtime::RuntimeEvent;

fn read_winsize(fd: c_int) -> Option<(u16, u16)> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };
    if result == 0 && size.ws_col > 0 && size.ws_row > 0 {
        Some((size.ws_col, size.ws_row))
    } else {
        None
    }
}

fn poll_readable(fd: c_int, timeout_ms: i32) -> bool {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    result > 0 && (fds.revents & libc::POLLIN) != 0
}

fn get_termios(fd: c_int) -> io::Result<libc::termios> {
    let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(termios)
}

fn set_termios(fd: c_int, termios: &libc::termios) -> io::Result<()> {
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Raw-mode terminal that forwards stdin chunks and resize signals as
/// [`RuntimeEvent`]s onto the main loop's channel.
pub struct ProcessTerminal {
    stdin_fd: c_int,
    stdout_fd: c_int,
    original_termios: Option<libc::termios>,
    stop_flag: Arc<AtomicBool>,
    input_thread: Option<JoinHandle<()>>,
    resize_signal_handle: Option<signal_hook::iterator::Handle>,
    resize_thread: Option<JoinHandle<()>>,
}

impl ProcessTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin_fd: libc::STDIN_FILENO,
            stdout_fd: libc::STDOUT_FILENO,
            original_termios: None,
            stop_flag: Arc::new(AtomicBool::new(false)),
            input_thread: None,
            resize_signal_handle: None,
            resize_thread: None,
        }
    }

    /// Enter raw mode, hide the cursor, and start the input and resize
    /// threads. Events arrive on `events` until [`ProcessTerminal::stop`].
    pub fn start(&mut self, events: Sender<RuntimeEvent>) -> io::Result<()> {
        self.enable_raw_mode()?;
        self.write_control("\x1b[?25l");

        self.stop_flag.store(false, Ordering::SeqCst);
        self.start_resize_thread(events.clone())?;
        self.start_input_thread(events);
        Ok(())
    }

    /// Stop the threads, restore the cursor, and leave raw mode.
    pub fn stop(&mut self) -> io::Result<()> {
        self.stop_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.input_thread.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.resize_signal_handle.take() {
            handle.close();
        }
        if let Some(thread) = self.resize_thread.take() {
            let _ = thread.join();
        }

        // Flush pending input before leaving raw mode so buffered bytes
        // don't leak to the shell.
        let _ = unsafe { libc::tcflush(self.stdin_fd, libc::TCIFLUSH) };
        self.write_control("\x1b[?25h");
        self.restore_raw_mode()
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        read_winsize(self.stdout_fd).map(|(cols, _)| cols).unwrap_or(80)
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        read_winsize(self.stdout_fd).map(|(_, rows)| rows).unwrap_or(24)
    }

    fn enable_raw_mode(&mut self) -> io::Result<()> {
        let original = match self.original_termios {
            Some(termios) => termios,
            None => {
                let termios = get_termios(self.stdin_fd)?;
                self.original_termios = Some(termios);
                termios
            }
        };
        let mut raw = original;
        unsafe {
            libc::cfmakeraw(&mut raw);
        }
        set_termios(self.stdin_fd, &raw)
    }

    fn restore_raw_mode(&mut self) -> io::Result<()> {
        if let Some(original) = self.original_termios.take() {
            set_termios(self.stdin_fd, &original)?;
        }
        Ok(())
    }

    fn start_input_thread(&mut self, events: Sender<RuntimeEvent>) {
        let stdin_fd = self.stdin_fd;
        let stop_flag = Arc::clone(&self.stop_flag);

        self.input_thread = Some(thread::spawn(move || {
            let mut buffer = [0u8; 4096];
            while !stop_flag.load(Ordering::SeqCst) {
                if !poll_readable(stdin_fd, 50) {
                    continue;
                }
                let read_len =
                    unsafe { libc::read(stdin_fd, buffer.as_mut_ptr() as *mut _, buffer.len()) };
                if read_len <= 0 {
                    continue;
                }
                let data = String::from_utf8_lossy(&buffer[..read_len as usize]).into_owned();
                if events.send(RuntimeEvent::Input(data)).is_err() {
                    break;
                }
            }
        }));
    }

    fn start_resize_thread(&mut self, events: Sender<RuntimeEvent>) -> io::Result<()> {
        let mut signals = Signals::new([libc::SIGWINCH])?;
        let handle = signals.handle();

        let thread = thread::spawn(move || {
            for _ in signals.forever() {
                if events.send(RuntimeEvent::Resize).is_err() {
                    break;
                }
            }
        });

        self.resize_signal_handle = Some(handle);
        self.resize_thread = Some(thread);
        Ok(())
    }

    fn write_control(&self, data: &str) {
        let bytes = data.as_bytes();
        let mut written = 0;
        while written < bytes.len() {
            let result = unsafe {
                libc::write(
                    self.stdout_fd,
                    bytes[written..].as_ptr() as *const _,
                    bytes.len() - written,
                )
            };
            if result <= 0 {
                return;
            }
            written += result as usize;
        }
    }
}

impl Default for ProcessTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProcessTerminal {
    fn drop(&mut self) {
        if self.original_termios.is_some() {
            let _ = self.stop();
        }
    }
}
