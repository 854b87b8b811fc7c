// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod data;
mod events;
mod metrics;
mod ui;

use app::App;
use data::format::{fmt_bytes, fmt_rate, fmt_uptime};
use data::DashboardData;
use metrics::{MetricsProvider, SystemProvider};

/// How long each event poll blocks; doubles as the render frame period.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "sysdash")]
#[command(about = "Live terminal dashboard for host system metrics")]
struct Args {
    /// Refresh interval in seconds
    #[arg(short, long, default_value = "1")]
    refresh: u64,

    /// Print a single plain-text snapshot and exit
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let interval = Duration::from_secs(args.refresh.max(1));

    // Cooperative cancellation: the handler only flips a flag, observed
    // between ticks so no partial tick is ever interrupted mid-render.
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    if args.once {
        // Logging goes to stderr only in snapshot mode; in TUI mode a
        // subscriber would scribble over the alternate screen.
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
        return print_once();
    }

    run_tui(Box::new(SystemProvider::new()), interval, running)
}

/// Run the interactive dashboard until quit or interrupt.
fn run_tui(
    provider: Box<dyn MetricsProvider>,
    interval: Duration,
    running: Arc<AtomicBool>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and take the first sample
    let mut app = App::new(provider);
    app.tick();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, interval, running);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("Dashboard stopped.");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    interval: Duration,
    running: Arc<AtomicBool>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while app.running {
        // An interrupt observed between ticks ends the loop cleanly.
        if !running.load(Ordering::SeqCst) {
            app.quit();
            break;
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Event polling doubles as the sleep phase.
        if let Some(event) = events::poll_event(POLL_INTERVAL)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Fixed-interval sampling; an overrunning tick is not
        // compensated for - the next one simply starts late.
        if last_tick.elapsed() >= interval {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Print one plain-text snapshot of every panel and exit.
///
/// CPU percentages need a baseline, so this samples twice with a short
/// pause in between.
fn print_once() -> Result<()> {
    let mut provider = SystemProvider::new();
    let mut engine = data::Engine::new();

    provider.sample();
    thread::sleep(Duration::from_millis(500));
    let snapshot = provider.sample();
    let dashboard = DashboardData::derive(&snapshot, &mut engine, 0.5, data::ProcessSort::Cpu);
    info!("sampled one snapshot");

    println!("=== SYSTEM SNAPSHOT ===");
    println!();
    println!("Uptime: {}", fmt_uptime(dashboard.uptime_secs));

    println!();
    println!("-- CPU --");
    for (core, percent) in dashboard.cpu.per_core.iter().enumerate() {
        println!("  Core {core}: {percent:5.1}%");
    }
    println!("  Average: {:.1}%", dashboard.cpu.average);
    let (one, five, fifteen) = dashboard.cpu.load_avg;
    println!("  Load: {one:.2} / {five:.2} / {fifteen:.2}");

    println!();
    println!("-- MEMORY --");
    println!(
        "  Used: {} / {} ({:.1}%)",
        fmt_bytes(dashboard.memory.used as f64),
        fmt_bytes(dashboard.memory.total as f64),
        dashboard.memory.percent
    );
    println!("  Available: {}", fmt_bytes(dashboard.memory.available as f64));
    println!(
        "  Cached: {}  Buffers: {}",
        fmt_bytes(dashboard.memory.cached as f64),
        fmt_bytes(dashboard.memory.buffers as f64)
    );
    if let Some(swap) = dashboard.memory.swap {
        println!(
            "  Swap: {} / {}",
            fmt_bytes(swap.used as f64),
            fmt_bytes(swap.total as f64)
        );
    }

    if dashboard.sensors.is_empty() {
        println!();
        println!("-- TEMPS --");
        println!("  No sensors detected");
    } else {
        println!();
        println!("-- TEMPS --");
        for sensor in &dashboard.sensors {
            println!("  {:<16} {:4.0}°C", sensor.label, sensor.celsius);
        }
    }

    println!();
    println!("-- DISK --");
    for partition in &dashboard.disk.partitions {
        println!(
            "  {:<12} {:5.1}%  {} / {}",
            partition.mount_point,
            partition.percent,
            fmt_bytes(partition.used as f64),
            fmt_bytes(partition.total as f64)
        );
    }
    if let Some(io_totals) = dashboard.disk.io {
        println!(
            "  IO: written {}  read {}",
            fmt_bytes(io_totals.written_bytes as f64),
            fmt_bytes(io_totals.read_bytes as f64)
        );
    }

    println!();
    println!("-- NETWORK --");
    println!(
        "  Up: {}  Down: {}",
        fmt_rate(dashboard.network.up_rate),
        fmt_rate(dashboard.network.down_rate)
    );
    println!(
        "  Totals: sent {}  recv {}",
        fmt_bytes(dashboard.network.total_sent as f64),
        fmt_bytes(dashboard.network.total_recv as f64)
    );
    println!(
        "  Connections: {} established, {} listening",
        dashboard.network.established, dashboard.network.listening
    );

    println!();
    println!("-- PROCESSES --");
    for process in &dashboard.processes.top {
        println!(
            "  {:>7}  {:<20} {:5.1}% cpu {:5.1}% mem",
            process.pid, process.name, process.cpu_percent, process.mem_percent
        );
    }
    println!("  {} active processes", dashboard.processes.total_active);

    Ok(())
}
