use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use std::net::SocketAddr;

        use actix_files::Files;
        use actix_web::{middleware, web, HttpServer};
        use anyhow::Context;
        use clap::Parser;
        use leptos::config::{get_configuration, LeptosOptions};
        use leptos_actix::{generate_route_list, LeptosRoutes};
        use notewise::routes::app::{shell, App};

        #[derive(Parser)]
        #[command(name = "Notewise")]
        #[command(about = "Notewise marketing site")]
        struct Args {
            #[arg(short='H', long="http_host", value_name = "HTTP_HOST", default_value="[::]:3000")]
            http_host: SocketAddr,
            #[arg(short='c', long="config", value_name = "CONFIG", default_value="notewise/leptos.toml")]
            config: String,
        }

        #[actix_web::main]
        async fn main() -> anyhow::Result<()> {
            if std::env::var("RUST_LOG").is_err() {
                std::env::set_var("RUST_LOG", "info");
            }
            pretty_env_logger::init();

            let args = Args::parse();

            let mut conf = get_configuration(Some(args.config.as_str()))
                .with_context(|| format!("failed to read leptos options from {}", args.config))?;
            conf.leptos_options.site_addr = args.http_host;
            let addr = conf.leptos_options.site_addr;
            let routes = generate_route_list(App);
            log::info!("Starting notewise server at: {addr}");
            HttpServer::new(move || {
                let leptos_options = &conf.leptos_options;
                let site_root = &leptos_options.site_root;
                actix_web::App::new()
                    // serve JS/WASM/CSS from `pkg`
                    .service(Files::new("/pkg", format!("{site_root}/pkg")))
                    // assets-dir is copied into the site root by cargo-leptos
                    .service(Files::new("/assets", format!("{site_root}/assets")))
                    .service(favicon)
                    .leptos_routes(routes.to_owned(), {
                        let leptos_options = leptos_options.clone();
                        move || shell(leptos_options.clone())
                    })
                    .app_data(web::Data::new(leptos_options.to_owned()))
                    .wrap(middleware::Logger::new("%t -- %a %s %U"))
            })
            .bind(&addr)?
            .run()
            .await
            .context("server failed")
        }

        #[actix_web::get("favicon.ico")]
        async fn favicon(
            leptos_options: web::Data<LeptosOptions>,
        ) -> actix_web::Result<actix_files::NamedFile> {
            let leptos_options = leptos_options.into_inner();
            let site_root = &leptos_options.site_root;
            Ok(actix_files::NamedFile::open(format!(
                "{site_root}/favicon.ico"
            ))?)
        }
    }

    // the browser build only needs the lib's hydrate() entry point
    else {
        pub fn main() {}
    }
}
