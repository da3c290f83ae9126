use crate::{
    api::{attendance, report, shift, user},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .milliseconds_per_request(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let write_per_min = config.rate_write_per_min;
    let read_per_min = config.rate_read_per_min;

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/users")
                    .wrap(build_limiter(write_per_min))
                    .service(web::resource("").route(web::post().to(user::create_user)))
                    .service(web::resource("/{id}").route(web::get().to(user::get_user))),
            )
            .service(
                web::scope("/shifts")
                    .wrap(build_limiter(write_per_min))
                    .service(web::resource("").route(web::post().to(shift::schedule_shift)))
                    .service(web::resource("/week").route(web::post().to(shift::schedule_week))),
            )
            .service(
                web::scope("/attendance")
                    .wrap(build_limiter(write_per_min))
                    .service(
                        web::resource("")
                            .route(web::post().to(attendance::ensure_record))
                            .route(web::get().to(attendance::list_records)),
                    )
                    .service(web::resource("/clock-in").route(web::post().to(attendance::clock_in)))
                    .service(
                        web::resource("/clock-out").route(web::post().to(attendance::clock_out)),
                    )
                    .service(web::resource("/approve").route(web::put().to(attendance::approve)))
                    .service(
                        web::resource("/unapprove").route(web::put().to(attendance::unapprove)),
                    )
                    // keyword segments above win over the id match
                    .service(web::resource("/{id}").route(web::get().to(attendance::get_record))),
            )
            .service(
                web::scope("/roster")
                    .wrap(build_limiter(read_per_min))
                    .service(web::resource("").route(web::get().to(shift::get_roster))),
            )
            .service(
                web::scope("/report")
                    .wrap(build_limiter(read_per_min))
                    .service(web::resource("/weekly").route(web::get().to(report::weekly))),
            ),
    );
}
