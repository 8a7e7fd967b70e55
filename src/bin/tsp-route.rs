use tsp_route::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    app::run()
}
