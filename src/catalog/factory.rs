use crate::catalog::domain::LibraryService;
use crate::catalog::domain::service::LibraryServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_library_service(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn LibraryService> {
    let publisher = create_publisher(via);
    Box::new(LibraryServiceImpl::new(config, publisher))
}
