use metafold::Marshal;

#[derive(Default, Marshal)]
#[marshal(access = "public")]
pub struct Sealed {
    secret: Option<String>,
}

fn main() {}
