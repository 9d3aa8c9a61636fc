use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use crumbtrail::store::SiteStore;
use crumbtrail::text::truncate_title;
use crumbtrail::{Account, BreadcrumbManager, ContentType, Node, NodeId, Role, RouteContext, Site};

const PATH_LENGTHS: &[u64] = &[1, 5, 20, 100];

fn site_with_path(length: u64) -> SiteStore {
    let mut site = Site::default();
    site.settings.allowed_types.insert("page".into());
    let path: Vec<NodeId> = (1..=length).map(NodeId).collect();
    site.content_types
        .push(ContentType::new("page", "Basic page").with_breadcrumb_path(path.clone()));
    site.roles
        .push(Role::new("editor", "Editor").with_breadcrumb_path(path));
    for id in 1..=length {
        site.nodes.push(Node::new(
            id,
            "page",
            format!("Ancestor page number {id} with a rather long title"),
        ));
    }
    SiteStore::new(site)
}

fn bench_content_type_trail(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_type_trail");

    for &length in PATH_LENGTHS {
        let manager = BreadcrumbManager::for_site(&site_with_path(length));
        let route = RouteContext::for_node(Node::new(0, "page", "Current"));
        group.bench_with_input(BenchmarkId::from_parameter(length), &route, |b, route| {
            b.iter(|| manager.build(black_box(route)));
        });
    }

    group.finish();
}

fn bench_user_trail(c: &mut Criterion) {
    let manager = BreadcrumbManager::for_site(&site_with_path(20));
    let route = RouteContext::for_user(
        Account::new(1, "ada").with_roles(["administrator", "content_author", "editor"]),
    );

    c.bench_function("user_trail", |b| {
        b.iter(|| manager.build(black_box(&route)));
    });
}

fn bench_path_fallback(c: &mut Criterion) {
    let manager = BreadcrumbManager::for_site(&site_with_path(5));
    let route = RouteContext::for_path("/docs/guides/getting-started/install/linux");

    c.bench_function("path_fallback", |b| {
        b.iter(|| manager.build(black_box(&route)));
    });
}

fn bench_truncate(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncate_title");

    group.bench_function("short", |b| {
        b.iter(|| truncate_title(black_box("Page One")));
    });
    group.bench_function("long", |b| {
        b.iter(|| truncate_title(black_box("Title Should Be Truncated to Forty Characters")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_content_type_trail,
    bench_user_trail,
    bench_path_fallback,
    bench_truncate
);
criterion_main!(benches);
