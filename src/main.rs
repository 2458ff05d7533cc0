use chartspan::error::AppResult;

fn main() -> AppResult<()> {
    chartspan::run()
}
