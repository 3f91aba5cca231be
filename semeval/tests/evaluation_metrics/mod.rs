mod sdp_resources;
mod sdp_properties;
