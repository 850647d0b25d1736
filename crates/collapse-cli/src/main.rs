mod command;
mod leaderboard;
mod schema;
mod store;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
